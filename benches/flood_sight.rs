use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flood_sight::{
    assemble, FloodModel, LatLon, LinearModel, RainfallObservation, RiskBand,
    StaticFeatureRecord, WeatherObservation,
};

fn bench_predict(c: &mut Criterion) {
    let record = StaticFeatureRecord {
        city: "Chennai".to_string(),
        values: vec![7.0, 5.0, 8.0, 4.0, 6.0, 4.0, 7.0, 6.0, 8.0, 2.0, 6.0, 6.0, 8.0, 7.0, 5.0],
    };
    let weather = WeatherObservation {
        temperature: 30.0,
        humidity: 70.0,
        wind_speed: 12.0,
        condition: "light rain".to_string(),
        location: LatLon(13.08, 80.27),
        resolved_name: None,
        observed_at: None,
    };
    let rainfall = RainfallObservation::forecast(0.4);
    let model = LinearModel::new(0.1, vec![0.02; 20]).expect("valid model");

    c.bench_function("assemble", |b| {
        b.iter(|| assemble(black_box(&record), black_box(&weather), black_box(&rainfall)))
    });
    c.bench_function("assemble_predict_classify", |b| {
        b.iter(|| {
            let features = assemble(&record, black_box(&weather), &rainfall);
            let prediction = model.predict(&features).expect("prediction");
            RiskBand::classify(prediction.probability())
        })
    });
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);

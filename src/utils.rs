use std::io;
use std::path::PathBuf;

const DATA_DIR_NAME: &str = "flood_sight";
pub const STATIC_FEATURES_FILE_NAME: &str = "city_static_features.csv";
pub const MODEL_FILE_NAME: &str = "flood_model.bin";

/// Default location of the static feature table and the model artifact.
pub fn get_data_dir() -> io::Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine system data directory",
            )
        })
        .map(|p| p.join(DATA_DIR_NAME))
}

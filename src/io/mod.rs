mod geojson;
mod load;

pub use geojson::{read_features, write_ranking};
pub use load::{load_layers, read_geojson_file};

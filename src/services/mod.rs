pub mod conversion;

pub use conversion::{
    default_output_path, resolve_selection, ConversionService, ConversionSummary,
};

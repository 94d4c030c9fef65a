// Adapters layer: concrete course sources.

pub mod local_file;

//! Dataset CSV reading and writing.

mod header;
mod reader;
mod writer;

pub use header::{DELIMITER, check_header, split_line};
pub use reader::{
    MAX_CSV_FILE_SIZE, ParseOptions, check_file_size, check_file_size_with_limit,
    has_csv_extension, parse_dataset, parse_dataset_with_options, read_dataset_file,
    read_dataset_text,
};
pub use writer::{write_dataset, write_dataset_quoted};

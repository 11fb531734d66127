//! FAIRe input loading: workbooks, CSV folders and archive receipts.

pub mod csv_folder;
pub mod error;
mod grid;
pub mod input;
pub mod project;
pub mod receipt;
pub mod workbook;

pub use csv_folder::{find_sheet_file, list_csv_files, read_csv_grid, read_csv_sheet};
pub use error::{IngestError, Result};
pub use input::{FaireInput, SheetAnchors, load_input};
pub use project::project_metadata;
pub use receipt::{parse_receipt, read_receipt};
pub use workbook::{Workbook, cell_from_data, is_workbook};

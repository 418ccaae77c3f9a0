pub mod headers;
pub mod iter;
pub mod validator;

pub use headers::HttpHeaders;
pub use iter::{Entries, IntoIter, Keys, Values};
pub use validator::{ValidationError, normalize_name, normalize_value};

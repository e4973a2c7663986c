mod page;
mod session;

pub use page::ClientPage;
pub use session::{BrowserConfig, BrowserKind, new_session};

mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
#[cfg(test)]
pub(crate) use locales::locales;
pub use render::{t, tr};

pub mod button;
pub mod foundation;
pub mod max_width_card;
pub mod text_field;

pub use button::Button;
pub use max_width_card::{CardVariant, MaxWidthCard};
pub use text_field::TextField;

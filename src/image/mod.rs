pub mod buffer;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::buffer::{gray_to_f32, ImageBuffer, ImageF32};
pub use self::traits::{Direct, ImageView, Sample};
pub use self::u8::ImageU8;

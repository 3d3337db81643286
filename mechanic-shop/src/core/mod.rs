pub mod traits;

pub use traits::ShopResource;

mod asset;
mod icon;
mod token;

pub use asset::{Asset, AssetProvenance, NATIVE_TOKEN_ADDRESS};
pub use icon::IconRef;
pub use token::{CustomTokenDescriptor, Erc20Token};

pub mod object;
pub mod pcall;
pub mod photon_int;
pub mod value;

pub use object::PObject;
pub use pcall::PCall;
pub use photon_int::PhotonInt;
pub use value::Value;

#[cfg(test)]
mod photon_int_test;

//! Crate plumbing shared by every layer

pub mod utils {
    #[macro_use]
    pub mod console;
}

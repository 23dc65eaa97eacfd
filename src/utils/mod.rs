mod debug;

pub use debug::pretty_dump;

pub use metaextract_shared_kernel::value_objects::*;

mod vendor_reference;

pub use vendor_reference::VendorReferencePolicy;

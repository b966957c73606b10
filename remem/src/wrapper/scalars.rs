//! Scalar conveniences over the typed transfer family: one read/write pair
//! per primitive numeric type, generated mechanically.

use paste::paste;
use remem_native::{NativeApi, ProcessHandle};

use super::NativeWrapper;

macro_rules! impl_scalar_access {
    ($data_type:ident) => {
        paste! {
            /// Reads one value from the target, `None` on failure.
            pub fn [<read_ $data_type>](&self, handle: ProcessHandle, address: usize) -> Option<$data_type> {
                let mut value = <$data_type>::default();
                self.read_process_memory(handle, address, &mut value).ok.then_some(value)
            }
            /// Writes one value into the target.
            pub fn [<write_ $data_type>](&self, handle: ProcessHandle, address: usize, value: $data_type) -> bool {
                self.write_process_memory(handle, address, &value).ok
            }
        }
    };
}

impl<N: NativeApi> NativeWrapper<N> {
    impl_scalar_access!(u8);
    impl_scalar_access!(u16);
    impl_scalar_access!(u32);
    impl_scalar_access!(u64);
    impl_scalar_access!(i8);
    impl_scalar_access!(i16);
    impl_scalar_access!(i32);
    impl_scalar_access!(i64);
    impl_scalar_access!(f32);
    impl_scalar_access!(f64);
}

use core::{
    cell::UnsafeCell,
    sync::atomic::{fence, AtomicBool, AtomicU8, Ordering},
};

/// Single writer, lock-free readers. Readers retry until they observe
/// a version that did not change while copying.
pub struct ReadSpinLock<T> {
    write_lock: AtomicBool,
    version: AtomicU8,
    data: UnsafeCell<T>,
}

impl<T: Default> Default for ReadSpinLock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> ReadSpinLock<T> {
    pub fn new(data: T) -> Self {
        let (write_lock, version) = (Default::default(), Default::default());
        Self { write_lock, version, data: UnsafeCell::new(data) }
    }
}

impl<T: Copy> ReadSpinLock<T> {
    /// Fails when another writer holds the lock
    pub fn write(&self, data: T) -> Result<(), bool> {
        let relaxed = Ordering::Relaxed;
        self.write_lock.compare_exchange(false, true, Ordering::Acquire, relaxed)?;
        self.version.fetch_add(1, Ordering::AcqRel);
        unsafe { *self.data.get() = data };
        self.version.fetch_add(1, Ordering::Release);
        self.write_lock.store(false, Ordering::Release);
        Ok(())
    }

    pub fn read(&self) -> T {
        loop {
            let version = self.version.load(Ordering::Acquire);
            if version & 1 != 0 {
                core::hint::spin_loop();
                continue;
            }
            let data = unsafe { core::ptr::read_volatile(self.data.get()) };
            fence(Ordering::Acquire);
            if version == self.version.load(Ordering::Relaxed) {
                return data;
            }
        }
    }
}

unsafe impl<T: Send + Sync> Sync for ReadSpinLock<T> {}
unsafe impl<T: Send> Send for ReadSpinLock<T> {}

mod test {
    #[test]
    fn test_write_then_read() {
        use super::ReadSpinLock;

        let lock = ReadSpinLock::new(0u32);
        assert_eq!(lock.read(), 0);
        assert_eq!(lock.write(42), Ok(()));
        assert_eq!(lock.read(), 42);
        assert_eq!(lock.write(43), Ok(()));
        assert_eq!(lock.read(), 43);
    }

    #[test]
    fn test_concurrent_readers() {
        use std::sync::Arc;

        use super::ReadSpinLock;

        let lock = Arc::new(ReadSpinLock::new((0u32, 0u32)));
        let writer = {
            let lock = lock.clone();
            std::thread::spawn(move || {
                for i in 1..=1000 {
                    lock.write((i, i * 2)).unwrap();
                }
            })
        };
        for _ in 0..1000 {
            let (a, b) = lock.read();
            assert_eq!(a * 2, b);
        }
        writer.join().unwrap();
        assert_eq!(lock.read(), (1000, 2000));
    }

    #[test]
    fn test_shared_across_threads() {
        use super::ReadSpinLock;
        use crate::datastore::DataStore;

        fn shareable<T: Send + Sync>() {}
        shareable::<ReadSpinLock<Option<u32>>>();
        shareable::<DataStore>();
    }
}

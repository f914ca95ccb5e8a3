use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A cloneable handle to one receiver, for commands driven from several threads.
///
/// Commands submitted through a [`SharedEngine`](crate::shared_engine::SharedEngine)
/// get the receiver as `&mut Context`; making that context a `SharedReceiver`
/// lets every thread hold its own handle while all of them mutate the same value.
///
/// # Examples
///
/// ```
/// use command_engine::shared_receiver::SharedReceiver;
///
/// let light = SharedReceiver::new(false);
/// let handle = light.clone();
/// handle.modify(|on| *on = true);
/// assert!(light.with(|on| *on));
/// ```
pub struct SharedReceiver<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> SharedReceiver<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }

    /// Locks the receiver, blocking until it is available.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn try_lock(&self) -> Option<MutexGuard<'_, T>> {
        self.inner.try_lock()
    }

    /// Reads from the receiver under the lock.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.lock())
    }

    pub fn modify<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.lock())
    }

    /// Takes the receiver back out of the handle.
    ///
    /// # Errors
    ///
    /// Returns the handle unchanged while other clones of it are still alive.
    pub fn into_inner(self) -> Result<T, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }

    /// Number of live handles to this receiver.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<T> Clone for SharedReceiver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedReceiver<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> std::fmt::Debug for SharedReceiver<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(value) => write!(f, "SharedReceiver({:?})", *value),
            None => write!(f, "SharedReceiver(<locked>)"),
        }
    }
}

impl<T> From<T> for SharedReceiver<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_value() {
        let receiver = SharedReceiver::new(20);
        let handle = receiver.clone();
        handle.modify(|value| *value += 10);

        assert_eq!(*receiver.lock(), 30);
        assert_eq!(receiver.handle_count(), 2);
    }

    #[test]
    fn test_with_and_modify_return_values() {
        let receiver = SharedReceiver::new(vec![1, 2]);
        let len = receiver.modify(|items| {
            items.push(3);
            items.len()
        });

        assert_eq!(len, 3);
        assert_eq!(receiver.with(|items| items.iter().sum::<i32>()), 6);
    }

    #[test]
    fn test_default_and_from() {
        let receiver: SharedReceiver<i32> = SharedReceiver::default();
        assert_eq!(*receiver.lock(), 0);
        assert_eq!(*SharedReceiver::from(7).lock(), 7);
    }

    #[test]
    fn test_into_inner() {
        let receiver = SharedReceiver::new(100);
        let handle = receiver.clone();

        let receiver = receiver.into_inner().unwrap_err();
        drop(handle);

        assert_eq!(receiver.into_inner().ok(), Some(100));
    }

    #[test]
    fn test_try_lock() {
        let receiver = SharedReceiver::new(5);

        {
            let _guard = receiver.lock();
            assert!(receiver.try_lock().is_none());
        }

        assert_eq!(receiver.try_lock().map(|guard| *guard), Some(5));
    }

    #[test]
    fn test_debug() {
        let receiver = SharedReceiver::new(5);
        assert_eq!(format!("{receiver:?}"), "SharedReceiver(5)");
        let _guard = receiver.lock();
        assert_eq!(format!("{receiver:?}"), "SharedReceiver(<locked>)");
    }
}

//! Shared I2C bus handles for the sensor drivers
//!
//! Both sensor drivers own an I2C handle, but the board has a single
//! bus. The whole firmware runs on one executor task, so transactions
//! never interleave and a `RefCell` is enough to hand out bus access.

use core::cell::RefCell;

use embedded_hal_async::i2c::{ErrorType, I2c, Operation};

/// A borrow of a `RefCell`-wrapped I2C bus
pub struct SharedI2c<'a, T> {
    bus: &'a RefCell<T>,
}

impl<'a, T> SharedI2c<'a, T> {
    pub fn new(bus: &'a RefCell<T>) -> Self {
        Self { bus }
    }
}

impl<T: ErrorType> ErrorType for SharedI2c<'_, T> {
    type Error = T::Error;
}

impl<T: I2c> I2c for SharedI2c<'_, T> {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        // The RefMut is held across the await. Every bus user must run
        // on the single UI task; a transaction started from a second
        // task would panic this borrow.
        self.bus.borrow_mut().transaction(address, operations).await
    }
}

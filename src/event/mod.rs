// Broadcast of applied state commands
//
// The store emits every command it applies; a view layer subscribes per
// tournament and re-renders from the commands it receives.

pub use bus::EventBus;

mod bus;

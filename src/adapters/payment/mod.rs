//! Payment gateway adapters.

mod stub_payment_gateway;

pub use stub_payment_gateway::StubPaymentGateway;

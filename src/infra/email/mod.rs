pub mod resend_transport;
pub mod smtp_transport;
pub mod test_outbox;

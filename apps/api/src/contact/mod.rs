// Contact form: field state, validation, submission lifecycle, and the
// EmailJS relay. Only `dispatch` talks to the network.

pub mod controller;
pub mod dispatch;
pub mod form;
pub mod handlers;
pub mod validation;

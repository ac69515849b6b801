mod helpers;
mod mocks;

mod payments;

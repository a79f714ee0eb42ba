// Each file under tests is its own executable; the live suite is a single one
// with a submodule per resource area.
// Every test talks to the public demo deployment and is `#[ignore]`d by default:
// run them with `cargo test -- --ignored`.

mod login;
mod orders;
mod register;

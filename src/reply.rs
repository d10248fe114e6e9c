use super::*;

#[derive(Debug)]
pub struct Reply<T> {
  pub body: T,
  pub status: StatusCode,
}

//! Concrete kinds and their dictionaries.
//!
//! Primitives wrap a standard type or a deferred computation:
//!
//! - [`option`], [`result`], [`array`]: `Option`, `Result` and `Vec`
//! - [`identity`]: the effect that adds nothing
//! - [`io`]: deferred synchronous actions
//! - [`async_io`]: deferred asynchronous actions (feature `async`)
//! - [`reader`]: computations reading an environment
//!
//! Composites are type aliases over the primitives whose dictionaries are
//! composed from the layers:
//!
//! - [`io_result`]: `IO<Result<A, E>>`
//! - [`async_io_option`]: `AsyncIO<Option<A>>` (feature `async`)
//! - [`reader_io_result`]: `Reader<R, IO<Result<A, E>>>`

pub mod array;
pub mod identity;
pub mod io;
pub mod io_result;
pub mod option;
pub mod reader;
pub mod reader_io_result;
pub mod result;

#[cfg(feature = "async")]
pub mod async_io;
#[cfg(feature = "async")]
pub mod async_io_option;

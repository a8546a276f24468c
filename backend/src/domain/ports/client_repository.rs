//! Port for client persistence.

use async_trait::async_trait;

use crate::domain::{Client, ClientId, NewClient, Pesel};

use super::define_port_error;

define_port_error! {
    /// Errors raised by client repository adapters.
    pub enum ClientRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "client repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "client repository query failed: {message}",
        /// The store already holds a client with this national id.
        DuplicatePesel { pesel: String } => "a client with pesel {pesel} already exists",
    }
}

/// Port for reading and creating clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Report whether a client with this identifier exists.
    async fn exists(&self, id: ClientId) -> Result<bool, ClientRepositoryError>;

    /// Fetch the client holding `pesel`, if any.
    async fn find_by_pesel(&self, pesel: &Pesel) -> Result<Option<Client>, ClientRepositoryError>;

    /// Insert a client and return it with its generated identifier.
    ///
    /// Adapters report a uniqueness violation on the national id as
    /// [`ClientRepositoryError::DuplicatePesel`].
    async fn insert(&self, client: &NewClient) -> Result<Client, ClientRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn duplicate_pesel_names_the_identifier() {
        let err = ClientRepositoryError::duplicate_pesel("12345678901");
        assert_eq!(
            err.to_string(),
            "a client with pesel 12345678901 already exists"
        );
    }
}

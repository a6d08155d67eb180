use core::fmt;

use crate::text::{Text, borrow_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownMessage,
    InvalidArguments,
    MissingArgument,
    InvalidConfiguration,
    DuplicateIdentifier,
    DuplicateKey,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Tr8nError<T: Text + ?Sized = str> {
    /// The identifier is not present in the table.
    UnknownMessage(T::Owned),
    /// Call mode disagrees with the message shape, or no plural case matched.
    InvalidArguments(T::Owned),
    MissingArgument { id: T::Owned, key: T::Owned },
    InvalidConfiguration { id: T::Owned, reason: &'static str },
    DuplicateIdentifier(T::Owned),
    DuplicateKey(T::Owned),
}

pub type Tr8nResult<V, T = str> = Result<V, Tr8nError<T>>;

impl<T: Text + ?Sized> Tr8nError<T> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Tr8nError::UnknownMessage(_) => ErrorKind::UnknownMessage,
            Tr8nError::InvalidArguments(_) => ErrorKind::InvalidArguments,
            Tr8nError::MissingArgument { .. } => ErrorKind::MissingArgument,
            Tr8nError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            Tr8nError::DuplicateIdentifier(_) => ErrorKind::DuplicateIdentifier,
            Tr8nError::DuplicateKey(_) => ErrorKind::DuplicateKey,
        }
    }

    /// Identifier of the offending message, if the failure names one.
    pub fn message_id(&self) -> Option<&T> {
        match self {
            Tr8nError::UnknownMessage(id)
            | Tr8nError::InvalidArguments(id)
            | Tr8nError::MissingArgument { id, .. }
            | Tr8nError::InvalidConfiguration { id, .. }
            | Tr8nError::DuplicateIdentifier(id) => Some(borrow_text::<T>(id)),
            Tr8nError::DuplicateKey(_) => None,
        }
    }
}

impl<T: Text + ?Sized> Clone for Tr8nError<T> {
    fn clone(&self) -> Self {
        match self {
            Tr8nError::UnknownMessage(id) => Tr8nError::UnknownMessage(id.clone()),
            Tr8nError::InvalidArguments(id) => Tr8nError::InvalidArguments(id.clone()),
            Tr8nError::MissingArgument { id, key } => Tr8nError::MissingArgument {
                id: id.clone(),
                key: key.clone(),
            },
            Tr8nError::InvalidConfiguration { id, reason } => Tr8nError::InvalidConfiguration {
                id: id.clone(),
                reason: *reason,
            },
            Tr8nError::DuplicateIdentifier(id) => Tr8nError::DuplicateIdentifier(id.clone()),
            Tr8nError::DuplicateKey(key) => Tr8nError::DuplicateKey(key.clone()),
        }
    }
}

impl<T: Text + ?Sized> fmt::Display for Tr8nError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tr8nError::UnknownMessage(id) => {
                write!(f, "unknown message: {}", borrow_text::<T>(id).display())
            }
            Tr8nError::InvalidArguments(id) => {
                write!(f, "invalid arguments: {}", borrow_text::<T>(id).display())
            }
            Tr8nError::MissingArgument { id, key } => write!(
                f,
                "missing argument: {}: {}",
                borrow_text::<T>(id).display(),
                borrow_text::<T>(key).display()
            ),
            Tr8nError::InvalidConfiguration { id, reason } => write!(
                f,
                "invalid configuration: {}: {reason}",
                borrow_text::<T>(id).display()
            ),
            Tr8nError::DuplicateIdentifier(id) => {
                write!(f, "duplicate identifier: {}", borrow_text::<T>(id).display())
            }
            Tr8nError::DuplicateKey(key) => {
                write!(f, "duplicate argument key: {}", borrow_text::<T>(key).display())
            }
        }
    }
}

#[cfg(feature = "std")]
impl<T: Text + ?Sized> std::error::Error for Tr8nError<T> {}

use core::fmt;

/// Result alias for `eigensplit`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the modularity builders and the partitioner.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Graph has no nodes.
    EmptyInput,

    /// Graph has no edges, so the null model divides by zero.
    NoEdges,

    /// A node subset referenced an index outside the graph.
    UnknownNode {
        /// Offending dense index.
        index: usize,
        /// Number of nodes in the graph.
        n_nodes: usize,
    },

    /// A node subset listed the same index more than once.
    DuplicateNode {
        /// Repeated dense index.
        index: usize,
    },

    /// Matrix dimension mismatch.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// The eigen solver could not decompose a matrix.
    Eigendecomposition(String),

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::NoEdges => write!(f, "graph has no edges; modularity is undefined"),
            Error::UnknownNode { index, n_nodes } => {
                write!(f, "node index {index} is outside a graph of {n_nodes} nodes")
            }
            Error::DuplicateNode { index } => {
                write!(f, "node index {index} appears more than once in the subset")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::Eigendecomposition(msg) => write!(f, "eigendecomposition failed: {msg}"),
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

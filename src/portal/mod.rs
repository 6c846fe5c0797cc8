pub mod config;
pub mod error;
pub mod graphql;
pub mod login;
pub mod models;
pub mod operations;
pub mod password;
pub mod results;
pub mod session;
pub mod student;
pub mod transport;

pub use self::config::{DEFAULT_ENDPOINT, PortalConfig};
pub use self::error::Error;
pub use self::login::{Credentials, login};
pub use self::session::{AuthSession, Claims, Session, SessionState, Token};
pub use self::student::StudentFileCache;
pub use self::transport::Transport;

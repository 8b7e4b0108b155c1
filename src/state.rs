use crate::db::ConnectionProvider;

#[derive(Clone)]
pub struct AppState {
    pub db: ConnectionProvider,
}

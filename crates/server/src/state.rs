use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::repository::AuthRepository;
use service::auth::{AuthService, Guard, TokenService};
use service::catalog::repo::seaorm::SeaOrmCatalogRepository;
use service::catalog::repository::CatalogRepository;
use service::catalog::CatalogService;
use service::contact::repo::seaorm::SeaOrmContactRepository;
use service::contact::repository::ContactRepository;
use service::contact::ContactService;
use service::review::repo::seaorm::SeaOrmReviewRepository;
use service::review::repository::ReviewRepository;
use service::review::ReviewService;
use service::shop::repo::seaorm::SeaOrmShopRepository;
use service::shop::repository::ShopRepository;
use service::shop::ShopService;

/// The five storage backends behind the workflow services. Bundled so
/// tests can swap every backend for the in-memory mocks in one go.
pub struct Repositories {
    pub auth: Arc<dyn AuthRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub shop: Arc<dyn ShopRepository>,
    pub review: Arc<dyn ReviewRepository>,
    pub contact: Arc<dyn ContactRepository>,
}

impl Repositories {
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            auth: Arc::new(SeaOrmAuthRepository { db: db.clone() }),
            catalog: Arc::new(SeaOrmCatalogRepository { db: db.clone() }),
            shop: Arc::new(SeaOrmShopRepository { db: db.clone() }),
            review: Arc::new(SeaOrmReviewRepository { db: db.clone() }),
            contact: Arc::new(SeaOrmContactRepository { db }),
        }
    }
}

/// Explicitly constructed process context: one token service, one guard
/// and one service instance per workflow, handed to every handler via
/// axum state. No hidden globals.
#[derive(Clone)]
pub struct ServerState {
    pub guard: Arc<Guard>,
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
    pub shop: Arc<ShopService>,
    pub reviews: Arc<ReviewService>,
    pub contact: Arc<ContactService>,
    pub uploads_dir: PathBuf,
}

impl ServerState {
    pub fn new(repos: Repositories, jwt_secret: &str, uploads_dir: impl Into<PathBuf>) -> Self {
        let tokens = Arc::new(TokenService::new(jwt_secret));
        Self {
            guard: Arc::new(Guard::new(tokens.clone())),
            auth: Arc::new(AuthService::new(repos.auth, tokens)),
            catalog: Arc::new(CatalogService::new(repos.catalog.clone())),
            shop: Arc::new(ShopService::new(repos.shop, repos.catalog)),
            reviews: Arc::new(ReviewService::new(repos.review)),
            contact: Arc::new(ContactService::new(repos.contact)),
            uploads_dir: uploads_dir.into(),
        }
    }
}

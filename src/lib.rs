pub mod modules;
pub mod shared;

pub use modules::season::{
    order_relations, AnimeRelation, AnimeRelationType, ChannelNavigator, NavigationRequest,
    Navigator, RelationLabelStyle, RelationMapper, RelationTitle, SeasonCard, SeasonsView,
    WatchRoute,
};
pub use shared::{AppError, AppResult, SeasonsConfig};

/// Load `.env`, read the configuration and start logging
///
/// Hosts call this once at startup and pass the returned config to
/// [`SeasonsView::from_config`].
pub fn init() -> AppResult<SeasonsConfig> {
    // A missing .env file is fine, the process environment still applies
    dotenvy::dotenv().ok();

    let config = SeasonsConfig::from_env()?;
    shared::utils::init_logger(config.log_level);
    log::debug!("Seasons configuration loaded: {:?}", config);

    Ok(config)
}

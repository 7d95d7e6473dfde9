//! UI Components

mod anime_card;
mod app_bar;
mod details_view;
mod episode_list;
mod episode_stepper;
mod home_view;
mod poster_card;
mod search_view;
mod star_rating;
mod watchlist_view;

pub use anime_card::AnimeCard;
pub use app_bar::AppBar;
pub use details_view::DetailsView;
pub use episode_list::EpisodeListView;
pub use episode_stepper::EpisodeStepper;
pub use home_view::HomeView;
pub use poster_card::PosterCard;
pub use search_view::SearchView;
pub use star_rating::StarRating;
pub use watchlist_view::WatchlistView;

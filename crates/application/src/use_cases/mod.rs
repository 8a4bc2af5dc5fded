mod get_forecast;
mod upstream_fetch;

pub use get_forecast::GetForecastUseCase;
pub use upstream_fetch::UpstreamForecastFetcher;

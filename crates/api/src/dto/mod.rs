mod weather;

pub use weather::{
    DailyEntryDto, InfoResponse, LocationDto, WeatherParams, WeatherResponse,
};

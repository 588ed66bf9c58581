use serde::Serialize;

/// Static reference data for one bookable movie.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub id: u32,
    pub name: String,
    pub genre: String,
    pub rating: String,
    pub theater: String,
    pub address: String,
    pub price: f64,
    pub showtimes: Vec<String>,
}

/// Read-only movie catalog, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Catalog { movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// The catalog currently on the marquee.
    pub fn sample() -> Self {
        Catalog::new(vec![
            movie(
                1,
                "Avengers: Endgame",
                "Action",
                "4.8",
                "PVR Cinemas",
                "123 Main Street, Downtown",
                350.0,
                &["10:00 AM", "1:30 PM", "5:00 PM", "8:30 PM"],
            ),
            movie(
                2,
                "The Dark Knight",
                "Action",
                "4.9",
                "INOX Multiplex",
                "456 Park Avenue, Midtown",
                300.0,
                &["11:00 AM", "2:30 PM", "6:00 PM", "9:30 PM"],
            ),
            movie(
                3,
                "Inception",
                "Sci-Fi",
                "4.7",
                "Cinepolis",
                "789 Broadway, Uptown",
                320.0,
                &["10:30 AM", "2:00 PM", "5:30 PM", "9:00 PM"],
            ),
            movie(
                4,
                "Interstellar",
                "Sci-Fi",
                "4.8",
                "PVR Cinemas",
                "123 Main Street, Downtown",
                340.0,
                &["12:00 PM", "3:30 PM", "7:00 PM", "10:30 PM"],
            ),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: u32,
    name: &str,
    genre: &str,
    rating: &str,
    theater: &str,
    address: &str,
    price: f64,
    showtimes: &[&str],
) -> Movie {
    Movie {
        id,
        name: name.to_string(),
        genre: genre.to_string(),
        rating: rating.to_string(),
        theater: theater.to_string(),
        address: address.to_string(),
        price,
        showtimes: showtimes.iter().map(|s| s.to_string()).collect(),
    }
}

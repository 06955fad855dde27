pub mod reservation_repo;

pub use reservation_repo::ReservationRepo;

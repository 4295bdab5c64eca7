mod mock_therapist_repository;

pub use mock_therapist_repository::MockTherapistRepository;

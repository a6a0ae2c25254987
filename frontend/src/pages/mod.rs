pub mod feedback;
pub mod landing;

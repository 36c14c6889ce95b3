//! Domain entities - the core business objects.

mod pagination;
mod post;

pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageMeta, PageRequest, Paginated};
pub use post::{NewPost, Post, PostId, PostPatch, parse_post_id};

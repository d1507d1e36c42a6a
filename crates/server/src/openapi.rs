use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct NewSellerDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct CreatedSellerDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct SellerUpdateDoc {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Accepted and ignored.
    pub password: Option<String>,
}

#[derive(ToSchema)]
pub struct BookDoc {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
    pub seller_id: i32,
}

#[derive(ToSchema)]
pub struct NewBookDoc {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
    pub seller_id: i32,
}

#[derive(ToSchema)]
pub struct SellerDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub books: Vec<BookDoc>,
}

#[derive(ToSchema)]
pub struct SellerListDoc { pub sellers: Vec<SellerDoc> }

#[derive(ToSchema)]
pub struct BookListDoc { pub books: Vec<BookDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sellers::create,
        crate::routes::sellers::list,
        crate::routes::sellers::get,
        crate::routes::sellers::update,
        crate::routes::sellers::delete,
        crate::routes::books::create,
        crate::routes::books::list,
        crate::routes::books::get,
    ),
    components(
        schemas(
            HealthResponse,
            NewSellerDoc,
            CreatedSellerDoc,
            SellerUpdateDoc,
            BookDoc,
            NewBookDoc,
            SellerDoc,
            SellerListDoc,
            BookListDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "sellers"),
        (name = "books")
    )
)]
pub struct ApiDoc;

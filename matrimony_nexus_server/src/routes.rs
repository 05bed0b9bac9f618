//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause
//! the current worker to stop processing new requests. Any long, non-cpu-bound operation (I/O, database calls, the
//! Stripe round-trip) must be awaited so that worker threads can interleave other requests.
use actix_web::{get, post, web, HttpResponse, Responder};
use log::*;
use matrimony_nexus_engine::{
    db_types::{BiodataUpdate, NewBiodata, NewContactRequest, NewFavorite, NewSuccessStory, NewUser},
    traits::{
        BiodataManagement,
        ContactRequestManagement,
        FavoriteManagement,
        InsertRecordResult,
        PaymentManagement,
        StatsManagement,
        SuccessStoryManagement,
        UserManagement,
    },
    BiodataApi,
    BiodataQueryFilter,
    ContactRequestApi,
    FavoriteApi,
    PaymentApi,
    StatsApi,
    SuccessStoryApi,
    UserApi,
};
use mns_common::UsdAmount;
use serde_json::{json, Value};
use stripe_tools::StripeApi;

use crate::{
    auth::{TokenClaims, TokenIssuer},
    data_objects::{PaymentIntentParams, PaymentParams, PremiumRequestParams},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds +)+ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };

    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+ where requires auth) => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds +)+ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>)
                    .wrap($crate::middleware::JwtMiddlewareFactory::new());
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };

    // Guard order matters: wraps run outermost-last, so the JWT guard fires before the admin check.
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+ where requires admin) => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds +)+ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>)
                    .wrap($crate::middleware::AdminMiddlewareFactory::<A>::new())
                    .wrap($crate::middleware::JwtMiddlewareFactory::new());
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Landing page  ----------------------------------------------------
#[get("/")]
pub async fn home() -> impl Responder {
    trace!("💻️ Received landing page request");
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(include_str!("./landing_page.html"))
}

//----------------------------------------------   Tokens  -----------------------------------------------------------
/// Issues a bearer token over whatever claims object the client posts. Clients sign the logged-in user's profile
/// wholesale, so no shape is imposed beyond "a JSON object"; the expiry is added server-side.
#[post("/jwt")]
pub async fn issue_jwt(body: web::Json<Value>, signer: web::Data<TokenIssuer>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received token request");
    let token = signer.issue_token(body.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "token": token })))
}

//----------------------------------------------   Users  ------------------------------------------------------------
route!(users => Get "/users" impl UserManagement);
pub async fn users<B: UserManagement>(api: web::Data<UserApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("🧑️ GET all users");
    let users = api.all_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

route!(register_user => Post "/users" impl UserManagement);
pub async fn register_user<B: UserManagement>(
    body: web::Json<NewUser>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let user = body.into_inner();
    debug!("🧑️ POST new user {}", user.email);
    match api.register_user(user).await? {
        InsertRecordResult::Inserted(id) => Ok(HttpResponse::Ok().json(json!({ "insertedId": id }))),
        InsertRecordResult::AlreadyExists => {
            Ok(HttpResponse::Ok().json(json!({ "message": "user already exists", "insertedId": null })))
        },
    }
}

route!(admin_check => Get "/users/admin/{email}" impl UserManagement where requires auth);
/// Answers "is this email an admin". Only the owner of the token may ask about their own email.
pub async fn admin_check<B: UserManagement>(
    claims: TokenClaims,
    path: web::Path<String>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let email = path.into_inner();
    if claims.email.as_deref() != Some(email.as_str()) {
        debug!("🔑️ Token email does not match requested email {email}");
        return Err(ServerError::InsufficientPermissions("email does not match the token".to_string()));
    }
    let admin = api.is_admin(&email).await?;
    Ok(HttpResponse::Ok().json(json!({ "admin": admin })))
}

route!(user_status => Get "/users/{email}" impl UserManagement where requires auth);
pub async fn user_status<B: UserManagement>(
    path: web::Path<String>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let email = path.into_inner();
    debug!("🧑️ GET premium status for {email}");
    match api.user_by_email(&email).await? {
        Some(user) => Ok(HttpResponse::Ok()
            .json(json!({ "premium": user.premium, "approvedPremium": user.approved_premium }))),
        None => Ok(HttpResponse::NotFound().json(json!({ "message": "User not found" }))),
    }
}

route!(premium_request => Post "/users/premium-request" impl UserManagement);
pub async fn premium_request<B: UserManagement>(
    body: web::Json<PremiumRequestParams>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = body.into_inner().id;
    debug!("🧑️ Premium request for user {id}");
    if api.request_premium(id).await? {
        Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Premium request submitted." })))
    } else {
        Ok(HttpResponse::NotFound().json(json!({ "success": false, "message": "Biodata not found or not updated." })))
    }
}

route!(pending_premium => Get "/users/pendingPremium" impl UserManagement where requires auth);
pub async fn pending_premium<B: UserManagement>(api: web::Data<UserApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("🧑️ GET pending premium users");
    let pending = api.pending_premium_users().await?;
    Ok(HttpResponse::Ok().json(pending))
}

route!(make_admin => Patch "/users/admin/{id}" impl UserManagement where requires admin);
pub async fn make_admin<B: UserManagement>(
    path: web::Path<i64>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let result = api.make_admin(id).await?;
    Ok(HttpResponse::Ok().json(result))
}

route!(make_premium => Patch "/users/premium/{id}" impl UserManagement where requires admin);
pub async fn make_premium<B: UserManagement>(
    path: web::Path<i64>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let result = api.make_premium(id).await?;
    Ok(HttpResponse::Ok().json(result))
}

route!(approve_premium => Patch "/users/approvedPremium/{id}" impl UserManagement where requires admin);
pub async fn approve_premium<B: UserManagement>(
    path: web::Path<i64>,
    api: web::Data<UserApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    let result = api.approve_premium(id).await?;
    Ok(HttpResponse::Ok().json(result))
}

//----------------------------------------------   Contact requests  -------------------------------------------------
// The singular `/user` prefix on this one route is what deployed clients call; keep it.
route!(contact_requests => Get "/user/contactRequest" impl ContactRequestManagement);
pub async fn contact_requests<B: ContactRequestManagement>(
    api: web::Data<ContactRequestApi<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("🙏️ GET all contact requests");
    let requests = api.all_requests().await?;
    Ok(HttpResponse::Ok().json(requests))
}

route!(contact_requests_for_email => Get "/users/contactRequests/{email}" impl ContactRequestManagement);
pub async fn contact_requests_for_email<B: ContactRequestManagement>(
    path: web::Path<String>,
    api: web::Data<ContactRequestApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let email = path.into_inner();
    debug!("🙏️ GET contact requests for {email}");
    let requests = api.requests_for_email(&email).await?;
    Ok(HttpResponse::Ok().json(requests))
}

route!(create_contact_request => Post "/users/contactRequests" impl ContactRequestManagement);
pub async fn create_contact_request<B: ContactRequestManagement>(
    body: web::Json<NewContactRequest>,
    api: web::Data<ContactRequestApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let request = body.into_inner();
    debug!("🙏️ POST contact request for biodata {}", request.biodata_id);
    let id = api.create_request(request).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "result": { "insertedId": id } })))
}

route!(approve_contact_request => Patch "/users/contactRequests/{id}" impl ContactRequestManagement, UserManagement where requires admin);
pub async fn approve_contact_request<B: ContactRequestManagement>(
    path: web::Path<i64>,
    api: web::Data<ContactRequestApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("🙏️ Approving contact request {id}");
    let result = api.approve_request(id).await?;
    Ok(HttpResponse::Ok().json(result))
}

route!(delete_contact_request => Delete "/users/contactRequests/{requestId}" impl ContactRequestManagement where requires auth);
pub async fn delete_contact_request<B: ContactRequestManagement>(
    path: web::Path<i64>,
    api: web::Data<ContactRequestApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("🙏️ Deleting contact request {id}");
    if api.delete_request(id).await? {
        Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Contact request removed successfully." })))
    } else {
        Ok(HttpResponse::NotFound().json(json!({ "success": false, "message": "Contact request not found." })))
    }
}

//----------------------------------------------   Biodatas  ---------------------------------------------------------
route!(biodatas => Get "/biodatas" impl BiodataManagement);
pub async fn biodatas<B: BiodataManagement>(
    query: web::Query<BiodataQueryFilter>,
    api: web::Data<BiodataApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let filter = query.into_inner();
    debug!("📝️ GET biodatas. {filter}");
    let result = api.search(filter).await?;
    Ok(HttpResponse::Ok().json(result))
}

route!(biodata_by_id => Get "/biodatas/{biodataId}" impl BiodataManagement);
pub async fn biodata_by_id<B: BiodataManagement>(
    path: web::Path<String>,
    api: web::Data<BiodataApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let raw_id = path.into_inner();
    let Ok(id) = raw_id.parse::<i64>() else {
        return Ok(HttpResponse::BadRequest().json(json!({ "error": "Invalid biodataId format." })));
    };
    debug!("📝️ GET biodata {id}");
    match api.biodata_by_id(id).await? {
        Some(biodata) => Ok(HttpResponse::Ok().json(json!({ "exists": true, "biodata": biodata }))),
        None => Ok(HttpResponse::NotFound().json(json!({ "exists": false }))),
    }
}

route!(create_biodata => Post "/biodatas" impl BiodataManagement);
pub async fn create_biodata<B: BiodataManagement>(
    body: web::Json<NewBiodata>,
    api: web::Data<BiodataApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let biodata = body.into_inner();
    debug!("📝️ POST biodata for {}", biodata.contact_email);
    match api.create_biodata(biodata).await? {
        InsertRecordResult::Inserted(id) => Ok(HttpResponse::Ok()
            .json(json!({ "success": true, "message": "Biodata created successfully.", "insertedId": id }))),
        InsertRecordResult::AlreadyExists => Ok(HttpResponse::BadRequest().json(
            json!({ "success": false, "message": "Biodata already exists for this email. Please edit instead." }),
        )),
    }
}

route!(update_biodata => Patch "/biodatas/{biodataId}" impl BiodataManagement);
pub async fn update_biodata<B: BiodataManagement>(
    path: web::Path<String>,
    body: web::Json<BiodataUpdate>,
    api: web::Data<BiodataApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let not_found = || HttpResponse::NotFound().json(json!({ "message": "Biodata not found" }));
    let Ok(id) = path.into_inner().parse::<i64>() else {
        return Ok(not_found());
    };
    debug!("📝️ PATCH biodata {id}");
    if api.update_biodata(id, body.into_inner()).await? {
        Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Biodata updated successfully" })))
    } else {
        Ok(not_found())
    }
}

route!(delete_biodata => Delete "/biodatas/{biodataId}" impl BiodataManagement);
pub async fn delete_biodata<B: BiodataManagement>(
    path: web::Path<String>,
    api: web::Data<BiodataApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let Ok(id) = path.into_inner().parse::<i64>() else {
        return Ok(HttpResponse::BadRequest().json(json!({ "error": "Invalid biodataId format." })));
    };
    debug!("📝️ DELETE biodata {id}");
    if api.delete_biodata(id).await? {
        Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Biodata deleted successfully." })))
    } else {
        Ok(HttpResponse::NotFound().json(json!({ "success": false, "message": "Biodata not found." })))
    }
}

//----------------------------------------------   Favorites  --------------------------------------------------------
route!(favorites => Get "/favorites" impl FavoriteManagement);
pub async fn favorites<B: FavoriteManagement>(api: web::Data<FavoriteApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("⭐️ GET all favorites");
    let favorites = api.all_favorites().await?;
    Ok(HttpResponse::Ok().json(favorites))
}

route!(favorites_for_user => Get "/favorites/{userId}" impl FavoriteManagement);
pub async fn favorites_for_user<B: FavoriteManagement>(
    path: web::Path<String>,
    api: web::Data<FavoriteApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let user_id = path.into_inner();
    debug!("⭐️ GET favorites for {user_id}");
    let favorites = api.favorites_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(favorites))
}

route!(add_favorite => Post "/favorites" impl FavoriteManagement where requires auth);
pub async fn add_favorite<B: FavoriteManagement>(
    body: web::Json<NewFavorite>,
    api: web::Data<FavoriteApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let favorite = body.into_inner();
    debug!("⭐️ POST favorite of biodata {} for {}", favorite.biodata_id, favorite.user_id);
    match api.add_favorite(favorite).await {
        Ok(InsertRecordResult::Inserted(id)) => Ok(HttpResponse::Ok()
            .json(json!({ "success": true, "message": "Added to favorites.", "result": { "insertedId": id } }))),
        Ok(InsertRecordResult::AlreadyExists) => {
            Ok(HttpResponse::BadRequest().json(json!({ "success": false, "message": "Already in favorites." })))
        },
        Err(e) => {
            error!("⭐️ Could not add favorite. {e}");
            Ok(HttpResponse::InternalServerError()
                .json(json!({ "success": false, "message": "Failed to add to favorites." })))
        },
    }
}

route!(remove_favorite => Delete "/favorites/{biodataId}" impl FavoriteManagement where requires auth);
pub async fn remove_favorite<B: FavoriteManagement>(
    path: web::Path<i64>,
    api: web::Data<FavoriteApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let biodata_id = path.into_inner();
    debug!("⭐️ DELETE favorite of biodata {biodata_id}");
    if api.remove_favorite(biodata_id).await? {
        Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Biodata removed from favorites." })))
    } else {
        Ok(HttpResponse::NotFound().json(json!({ "success": false, "message": "Biodata not found." })))
    }
}

//----------------------------------------------   Payments  ---------------------------------------------------------
#[post("/create-payment-intent")]
pub async fn create_payment_intent(
    body: web::Json<PaymentIntentParams>,
    stripe: web::Data<StripeApi>,
) -> Result<HttpResponse, ServerError> {
    let amount = UsdAmount::from_dollars(body.into_inner().price);
    debug!("💰️ Creating payment intent for {amount}");
    let intent = stripe.create_payment_intent(amount).await?;
    Ok(HttpResponse::Ok().json(json!({ "clientSecret": intent.client_secret })))
}

route!(payments_for_email => Get "/payments/{email}" impl PaymentManagement where requires auth);
/// Payment history is private: the token's email must match the path email exactly.
pub async fn payments_for_email<B: PaymentManagement>(
    claims: TokenClaims,
    path: web::Path<String>,
    api: web::Data<PaymentApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let email = path.into_inner();
    if claims.email.as_deref() != Some(email.as_str()) {
        debug!("🔑️ Token email does not match requested email {email}");
        return Err(ServerError::InsufficientPermissions("email does not match the token".to_string()));
    }
    debug!("💰️ GET payments for {email}");
    let payments = api.payments_for_email(&email).await?;
    Ok(HttpResponse::Ok().json(payments))
}

route!(record_payment => Post "/payments" impl PaymentManagement);
pub async fn record_payment<B: PaymentManagement>(
    body: web::Json<PaymentParams>,
    api: web::Data<PaymentApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let params = body.into_inner();
    let id = api.record_payment(params.payment).await?;
    // Cart cleanup was never implemented upstream of this service; the `cartIds` field is acknowledged but nothing
    // is deleted either way.
    let response = match params.cart_ids {
        Some(cart_ids) => {
            debug!("💰️ Payment {id} recorded. Ignoring {} cart item(s).", cart_ids.len());
            json!({ "paymentResult": { "insertedId": id } })
        },
        None => json!({
            "paymentResult": { "insertedId": id },
            "deleteResult": null,
            "message": "No cart items to delete."
        }),
    };
    Ok(HttpResponse::Ok().json(response))
}

//----------------------------------------------   Dashboard  --------------------------------------------------------
route!(dashboard_stats => Get "/dashboard/stats" impl StatsManagement);
pub async fn dashboard_stats<B: StatsManagement>(api: web::Data<StatsApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET dashboard stats");
    let stats = api.dashboard_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

route!(dashboard_chart => Get "/dashboard/chart" impl StatsManagement);
pub async fn dashboard_chart<B: StatsManagement>(api: web::Data<StatsApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET dashboard chart");
    let stats = api.chart_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

//----------------------------------------------   Success stories  --------------------------------------------------
route!(success_stories => Get "/success-story" impl SuccessStoryManagement);
pub async fn success_stories<B: SuccessStoryManagement>(
    api: web::Data<SuccessStoryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET success stories");
    let stories = api.all_stories().await?;
    Ok(HttpResponse::Ok().json(stories))
}

route!(create_success_story => Post "/success-story" impl SuccessStoryManagement);
pub async fn create_success_story<B: SuccessStoryManagement>(
    body: web::Json<NewSuccessStory>,
    api: web::Data<SuccessStoryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = api.add_story(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "insertedId": id })))
}

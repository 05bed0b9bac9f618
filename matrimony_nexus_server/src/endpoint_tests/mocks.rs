use matrimony_nexus_engine::{
    db_types::{
        Biodata,
        BiodataUpdate,
        Favorite,
        NewBiodata,
        NewFavorite,
        NewPaymentRecord,
        NewUser,
        PaymentRecord,
        UpdateResult,
        User,
    },
    mne_api::biodata_objects::{BiodataQueryFilter, BiodataSearchResult},
    traits::{
        BiodataError,
        BiodataManagement,
        FavoriteError,
        FavoriteManagement,
        InsertRecordResult,
        PaymentError,
        PaymentManagement,
        UserAccountError,
        UserManagement,
    },
};
use mockall::mock;

mock! {
    pub UserManager {}
    impl UserManagement for UserManager {
        async fn fetch_all_users(&self) -> Result<Vec<User>, UserAccountError>;
        async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserAccountError>;
        async fn insert_user(&self, user: NewUser) -> Result<InsertRecordResult, UserAccountError>;
        async fn request_premium(&self, user_id: i64) -> Result<bool, UserAccountError>;
        async fn fetch_pending_premium_users(&self) -> Result<Vec<User>, UserAccountError>;
        async fn set_admin_role(&self, user_id: i64) -> Result<UpdateResult, UserAccountError>;
        async fn set_premium(&self, user_id: i64) -> Result<UpdateResult, UserAccountError>;
        async fn approve_premium(&self, user_id: i64) -> Result<UpdateResult, UserAccountError>;
    }
}

mock! {
    pub BiodataManager {}
    impl BiodataManagement for BiodataManager {
        async fn search_biodatas(&self, query: BiodataQueryFilter) -> Result<BiodataSearchResult, BiodataError>;
        async fn fetch_biodata_by_id(&self, biodata_id: i64) -> Result<Option<Biodata>, BiodataError>;
        async fn insert_biodata(&self, biodata: NewBiodata) -> Result<InsertRecordResult, BiodataError>;
        async fn update_biodata(&self, biodata_id: i64, update: BiodataUpdate) -> Result<bool, BiodataError>;
        async fn delete_biodata(&self, biodata_id: i64) -> Result<bool, BiodataError>;
    }
}

mock! {
    pub PaymentManager {}
    impl PaymentManagement for PaymentManager {
        async fn fetch_payments_for_email(&self, email: &str) -> Result<Vec<PaymentRecord>, PaymentError>;
        async fn insert_payment(&self, payment: NewPaymentRecord) -> Result<i64, PaymentError>;
    }
}

mock! {
    pub FavoriteManager {}
    impl FavoriteManagement for FavoriteManager {
        async fn fetch_all_favorites(&self) -> Result<Vec<Favorite>, FavoriteError>;
        async fn fetch_favorites_for_user(&self, user_id: &str) -> Result<Vec<Favorite>, FavoriteError>;
        async fn insert_favorite(&self, favorite: NewFavorite) -> Result<InsertRecordResult, FavoriteError>;
        async fn delete_favorite_by_biodata_id(&self, biodata_id: i64) -> Result<bool, FavoriteError>;
    }
}

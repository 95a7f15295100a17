use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
    sea_query::{Expr, Func},
};

use crate::{
    entities::{movies, ratings, watched, watchlist},
    error::AppResult,
    models::NewMovie,
};

#[derive(Clone)]
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_movies(&self) -> AppResult<Vec<movies::Model>> {
        Ok(movies::Entity::find().all(&self.db).await?)
    }

    pub async fn find_movie_by_title(&self, title: &str) -> AppResult<Option<movies::Model>> {
        // LOWER(title) = LOWER(?)
        let movie = movies::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(movies::Column::Title))).eq(Func::lower(title)),
            )
            .one(&self.db)
            .await?;
        Ok(movie)
    }

    pub async fn insert_movie(&self, movie: &NewMovie) -> AppResult<i32> {
        let model = movies::ActiveModel {
            id: Default::default(),
            title: Set(movie.title.clone()),
            director: Set(movie.director.clone()),
            release_year: Set(movie.release_year),
            genre: Set(movie.genre.clone()),
        };
        let res = movies::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn list_watchlist(&self) -> AppResult<Vec<watchlist::Model>> {
        Ok(watchlist::Entity::find().all(&self.db).await?)
    }

    pub async fn add_to_watchlist(&self, movie_id: i32) -> AppResult<()> {
        watchlist::Entity::insert(watchlist::ActiveModel { movie_id: Set(movie_id) })
            .exec(&self.db)
            .await?;
        Ok(())
    }

    pub async fn remove_from_watchlist(&self, movie_id: i32) -> AppResult<()> {
        watchlist::Entity::delete_many()
            .filter(watchlist::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    pub async fn list_watched(&self) -> AppResult<Vec<watched::Model>> {
        Ok(watched::Entity::find().all(&self.db).await?)
    }

    /// Records the movie as watched and drops any watchlist entry for it,
    /// in that order, inside one transaction.
    pub async fn mark_watched(&self, movie_id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        watched::Entity::insert(watched::ActiveModel { movie_id: Set(movie_id) })
            .exec(&txn)
            .await?;

        watchlist::Entity::delete_many()
            .filter(watchlist::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn remove_from_watched(&self, movie_id: i32) -> AppResult<()> {
        watched::Entity::delete_many()
            .filter(watched::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    pub async fn list_ratings(&self) -> AppResult<Vec<ratings::Model>> {
        Ok(ratings::Entity::find().all(&self.db).await?)
    }

    /// Sets the movie's rating, updating the existing row if there is one.
    /// Returns true when a new row was inserted.
    pub async fn set_rating(&self, movie_id: i32, rating: f64) -> AppResult<bool> {
        let existing = ratings::Entity::find()
            .filter(ratings::Column::MovieId.eq(movie_id))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            ratings::Entity::update_many()
                .col_expr(ratings::Column::Rating, Expr::value(rating))
                .filter(ratings::Column::MovieId.eq(movie_id))
                .exec(&self.db)
                .await?;
            Ok(false)
        } else {
            ratings::Entity::insert(ratings::ActiveModel {
                movie_id: Set(movie_id),
                rating: Set(rating),
            })
            .exec(&self.db)
            .await?;
            Ok(true)
        }
    }

    pub async fn remove_rating(&self, movie_id: i32) -> AppResult<()> {
        ratings::Entity::delete_many()
            .filter(ratings::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

//! Movie statements

use super::{Database, Movie, MovieInput, MovieWithDirector, MovieWithGenre, StoreResult};

impl Database {
    /// 전체 영화 목록
    pub async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies")
            .fetch_all(&self.pool)
            .await
    }

    /// 영화 단건 조회
    ///
    /// id는 경로에서 받은 문자열 그대로 바인딩 (INTEGER affinity로 비교)
    pub async fn get_movie(&self, id: &str) -> StoreResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// 영화 생성 → 새 id 반환
    pub async fn create_movie(&self, input: &MovieInput) -> StoreResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO movies (title, director_id, genre_id, score, rating, release_year)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(input.director_id)
        .bind(input.genre_id)
        .bind(input.score)
        .bind(&input.rating)
        .bind(input.release_year)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// 영화 전체 교체 → 영향받은 행 수 반환
    pub async fn update_movie(&self, id: &str, input: &MovieInput) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE movies
            SET title = ?, director_id = ?, genre_id = ?, score = ?, rating = ?, release_year = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(input.director_id)
        .bind(input.genre_id)
        .bind(input.score)
        .bind(&input.rating)
        .bind(input.release_year)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// 영화 삭제 → 영향받은 행 수 반환
    pub async fn delete_movie(&self, id: &str) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// 감독별 영화 목록 (감독 이름 포함)
    ///
    /// INNER JOIN: 존재하지 않는 감독을 가리키는 영화는 제외됨
    pub async fn list_movies_by_director(
        &self,
        director_id: &str,
    ) -> StoreResult<Vec<MovieWithDirector>> {
        sqlx::query_as::<_, MovieWithDirector>(
            r#"
            SELECT movies.*, directors.name AS director_name
            FROM movies
            INNER JOIN directors ON movies.director_id = directors.id
            WHERE movies.director_id = ?
            "#,
        )
        .bind(director_id)
        .fetch_all(&self.pool)
        .await
    }

    /// 장르별 영화 목록 (장르 이름 포함)
    pub async fn list_movies_by_genre(&self, genre_id: &str) -> StoreResult<Vec<MovieWithGenre>> {
        sqlx::query_as::<_, MovieWithGenre>(
            r#"
            SELECT movies.*, genres.name AS genre_name
            FROM movies
            INNER JOIN genres ON movies.genre_id = genres.id
            WHERE movies.genre_id = ?
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await
    }
}

//! Genre statements

use super::{Database, Genre, NameInput, StoreResult};

impl Database {
    /// 전체 장르 목록
    pub async fn list_genres(&self) -> StoreResult<Vec<Genre>> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres")
            .fetch_all(&self.pool)
            .await
    }

    /// 장르 단건 조회
    pub async fn get_genre(&self, id: &str) -> StoreResult<Option<Genre>> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// 장르 생성 → 새 id 반환
    pub async fn create_genre(&self, input: &NameInput) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO genres (name) VALUES (?)")
            .bind(&input.name)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// 장르 이름 교체
    pub async fn update_genre(&self, id: &str, input: &NameInput) -> StoreResult<u64> {
        let result = sqlx::query("UPDATE genres SET name = ? WHERE id = ?")
            .bind(&input.name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// 장르 삭제 (참조하는 영화는 그대로 유지)
    pub async fn delete_genre(&self, id: &str) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM genres WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

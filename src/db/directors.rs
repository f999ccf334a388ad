//! Director statements

use super::{Database, Director, NameInput, StoreResult};

impl Database {
    /// 전체 감독 목록
    pub async fn list_directors(&self) -> StoreResult<Vec<Director>> {
        sqlx::query_as::<_, Director>("SELECT * FROM directors")
            .fetch_all(&self.pool)
            .await
    }

    /// 감독 단건 조회
    pub async fn get_director(&self, id: &str) -> StoreResult<Option<Director>> {
        sqlx::query_as::<_, Director>("SELECT * FROM directors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// 감독 생성 → 새 id 반환
    pub async fn create_director(&self, input: &NameInput) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO directors (name) VALUES (?)")
            .bind(&input.name)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// 감독 이름 교체
    pub async fn update_director(&self, id: &str, input: &NameInput) -> StoreResult<u64> {
        let result = sqlx::query("UPDATE directors SET name = ? WHERE id = ?")
            .bind(&input.name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// 감독 삭제 (참조하는 영화는 그대로 유지)
    pub async fn delete_director(&self, id: &str) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM directors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

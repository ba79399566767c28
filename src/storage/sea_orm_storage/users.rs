use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, SgaError};
use crate::models::{
    PaginationInfo,
    users::{
        entities::{Estatus, UserRole, Usuario},
        requests::{NewUsuario, UpdateUsuarioData, UserListParams},
        responses::UserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_user_impl(&self, req: NewUsuario) -> Result<Usuario> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password_hash),
            rol: Set(req.rol.to_string()),
            estatus: Set(req.estatus.to_string()),
            plantel_id: Set(req.plantel_id),
            grupo_id: Set(req.grupo_id),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            telefono: Set(req.telefono),
            direccion: Set(req.direccion),
            fecha_nacimiento: Set(req.fecha_nacimiento),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user creation failed: {e}")))?;

        Ok(result.into_usuario())
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<Usuario>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_usuario()))
    }

    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<Usuario>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_usuario()))
    }

    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<Usuario>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_usuario()))
    }

    /// Campus-scoped lookup; an id from another campus comes back as None.
    pub async fn get_user_scoped_impl(
        &self,
        id: i64,
        plantel_id: i64,
    ) -> Result<Option<Usuario>> {
        let result = Users::find()
            .filter(Column::Id.eq(id))
            .filter(Column::PlantelId.eq(plantel_id))
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_usuario()))
    }

    pub async fn list_users_by_rol_impl(
        &self,
        plantel_id: i64,
        rol: UserRole,
        params: UserListParams,
    ) -> Result<UserListResponse> {
        let page = params.pagination.page.max(1) as u64;
        let size = params.pagination.size.clamp(1, 100) as u64;

        let mut select = Users::find()
            .filter(Column::PlantelId.eq(plantel_id))
            .filter(Column::Rol.eq(rol.to_string()));

        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Username.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped)),
            );
        }

        if let Some(ref estatus) = params.estatus {
            select = select.filter(Column::Estatus.eq(estatus.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SgaError::database_operation(format!("user count failed: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SgaError::database_operation(format!("user page count failed: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SgaError::database_operation(format!("user listing failed: {e}")))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_usuario()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_alumnos_by_grupo_impl(&self, grupo_id: i64) -> Result<Vec<Usuario>> {
        let users = Users::find()
            .filter(Column::GrupoId.eq(grupo_id))
            .filter(Column::Rol.eq(UserRole::Alumno.to_string()))
            .order_by_asc(Column::LastName)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("student listing failed: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_usuario()).collect())
    }

    pub async fn update_user_scoped_impl(
        &self,
        id: i64,
        plantel_id: i64,
        update: UpdateUsuarioData,
    ) -> Result<Option<Usuario>> {
        let existing = self.get_user_scoped_impl(id, plantel_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(telefono) = update.telefono {
            model.telefono = Set(Some(telefono));
        }
        if let Some(direccion) = update.direccion {
            model.direccion = Set(Some(direccion));
        }
        if let Some(estatus) = update.estatus {
            model.estatus = Set(estatus.to_string());
        }
        if let Some(grupo_id) = update.grupo_id {
            model.grupo_id = Set(grupo_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user update failed: {e}")))?;

        self.get_user_scoped_impl(id, plantel_id).await
    }

    /// Own-profile update; no campus filter because users always edit
    /// themselves here.
    pub async fn update_own_profile_impl(
        &self,
        id: i64,
        update: UpdateUsuarioData,
    ) -> Result<Option<Usuario>> {
        let existing = self.get_user_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(telefono) = update.telefono {
            model.telefono = Set(Some(telefono));
        }
        if let Some(direccion) = update.direccion {
            model.direccion = Set(Some(direccion));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("profile update failed: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    pub async fn delete_user_scoped_impl(&self, id: i64, plantel_id: i64) -> Result<bool> {
        let result = Users::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::PlantelId.eq(plantel_id))
            .exec(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user deletion failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_password_impl(
        &self,
        id: i64,
        password_hash: String,
        estatus: Option<Estatus>,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(estatus) = estatus {
            model.estatus = Set(estatus.to_string());
        }

        let result = model.update(&self.db).await;
        match result {
            Ok(_) => Ok(true),
            Err(sea_orm::DbErr::RecordNotFound(_)) => Ok(false),
            Err(e) => Err(SgaError::database_operation(format!(
                "password update failed: {e}"
            ))),
        }
    }

    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("last-login update failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_foto_perfil_impl(&self, id: i64, filename: String) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(
                Column::FotoPerfil,
                sea_orm::sea_query::Expr::value(Some(filename)),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("photo update failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_users_by_rol_impl(&self, plantel_id: i64, rol: UserRole) -> Result<i64> {
        let count = Users::find()
            .filter(Column::PlantelId.eq(plantel_id))
            .filter(Column::Rol.eq(rol.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user count failed: {e}")))?;

        Ok(count as i64)
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("user count failed: {e}")))?;

        Ok(count)
    }
}

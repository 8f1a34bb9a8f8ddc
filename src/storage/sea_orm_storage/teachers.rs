use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    teachers::{
        entities::{Teacher, TeacherWithUser},
        requests::{CreateTeacherProfile, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建教师档案
    pub async fn create_teacher_profile_impl(
        &self,
        profile: CreateTeacherProfile,
    ) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let subject_ids = serde_json::to_string(&profile.subject_ids)
            .map_err(|e| EduSystemError::serialization(format!("科目列表序列化失败: {e}")))?;

        let model = ActiveModel {
            user_id: Set(profile.user_id),
            school_id: Set(profile.school_id),
            employee_no: Set(profile.employee_no),
            qualification: Set(profile.qualification),
            subject_ids: Set(Some(subject_ids)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("创建教师档案失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师档案
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过用户 ID 获取教师档案
    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师（带账号信息）
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Teachers::find()
            .find_also_related(Users)
            .filter(Column::SchoolId.eq(query.school_id));

        // 搜索条件：工号或账号姓名
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::EmployeeNo.contains(&escaped))
                    .add(UserColumn::Username.contains(&escaped))
                    .add(UserColumn::DisplayName.contains(&escaped)),
            );
        }

        // 科目筛选：subject_ids 为 JSON 数组文本，匹配边界上的 id
        if let Some(subject_id) = query.subject_id {
            select = select.filter(
                Condition::any()
                    .add(Column::SubjectIds.eq(format!("[{subject_id}]")))
                    .add(Column::SubjectIds.starts_with(format!("[{subject_id},")))
                    .add(Column::SubjectIds.ends_with(format!(",{subject_id}]")))
                    .add(Column::SubjectIds.contains(format!(",{subject_id},"))),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师页数失败: {e}")))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        let items = rows
            .into_iter()
            .filter_map(|(teacher, user)| {
                user.map(|u| TeacherWithUser {
                    teacher: teacher.into_teacher(),
                    user: u.into_user(),
                })
            })
            .collect();

        Ok(TeacherListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师档案
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(qualification) = update.qualification {
            model.qualification = Set(Some(qualification));
        }

        if let Some(subject_ids) = update.subject_ids {
            let encoded = serde_json::to_string(&subject_ids)
                .map_err(|e| EduSystemError::serialization(format!("科目列表序列化失败: {e}")))?;
            model.subject_ids = Set(Some(encoded));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新教师档案失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }
}

//! LLM 客户端封装
//!
//! 基于 `async-openai`，兼容任何 OpenAI 风格的端点（API key、
//! base URL、模型名均来自配置）。

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
        ChatCompletionRequestMessageContentPartText, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContent,
        ChatCompletionRequestUserMessageContentPart, CreateChatCompletionRequestArgs, ImageDetail,
        ImageUrl,
    },
};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::{EduSystemError, Result};

pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_output_tokens: u32,
}

impl LlmService {
    /// 从全局配置创建客户端
    pub fn from_config() -> Self {
        let ai = &AppConfig::get().ai;

        let openai_config = OpenAIConfig::new()
            .with_api_key(&ai.api_key)
            .with_api_base(&ai.api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: ai.model_name.clone(),
            max_output_tokens: ai.max_output_tokens,
        }
    }

    /// 通用的 LLM 调用
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    /// - `imgs`: 图片 URL 列表（可选，支持 data URL），走 Vision 通道
    pub async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: Option<&str>,
        imgs: Option<&[String]>,
    ) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| EduSystemError::ai_provider(format!("构建系统消息失败: {e}")))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 构建用户消息内容（支持图片）
        let user_msg = if let Some(img_urls) = imgs
            && !img_urls.is_empty()
        {
            let mut content_parts: Vec<ChatCompletionRequestUserMessageContentPart> = Vec::new();

            content_parts.push(ChatCompletionRequestUserMessageContentPart::Text(
                ChatCompletionRequestMessageContentPartText {
                    text: user_message.to_string(),
                },
            ));

            for url in img_urls.iter() {
                content_parts.push(ChatCompletionRequestUserMessageContentPart::ImageUrl(
                    ChatCompletionRequestMessageContentPartImage {
                        image_url: ImageUrl {
                            url: url.clone(),
                            detail: Some(ImageDetail::Auto),
                        },
                    },
                ));
            }

            debug!("使用 Vision API，包含 {} 张图片", img_urls.len());

            ChatCompletionRequestUserMessageArgs::default()
                .content(ChatCompletionRequestUserMessageContent::Array(
                    content_parts,
                ))
                .build()
                .map_err(|e| EduSystemError::ai_provider(format!("构建用户消息失败: {e}")))?
        } else {
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_message)
                .build()
                .map_err(|e| EduSystemError::ai_provider(format!("构建用户消息失败: {e}")))?
        };

        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.3)
            .max_tokens(self.max_output_tokens)
            .build()
            .map_err(|e| EduSystemError::ai_provider(format!("构建请求失败: {e}")))?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            EduSystemError::ai_provider(format!("LLM API 调用失败: {e}"))
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| EduSystemError::ai_provider("LLM 返回内容为空"))?;

        Ok(content.trim().to_string())
    }
}

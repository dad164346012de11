//! DODP v1 operations
//!
//! One method per remote operation. Each builds the request element,
//! invokes [`DaisyClient::call`] and returns the meaningful part of the
//! response. A `false` result is a legitimate answer of the service and is
//! distinct from an error: check the `Result` first.

use crate::client::DaisyClient;
use crate::error::Result;
use crate::messages::*;
use crate::models::{
    Announcements, BookmarkSet, ContentList, ContentMetadata, Questions, Read,
    ReadingSystemAttributes, Resources, ServiceAttributes, UserResponses,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

impl DaisyClient {
    fn invoke<Req, Resp>(&self, action: &'static str, request: Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned + Default,
    {
        let mut response = Resp::default();
        self.call(action, &request, &mut response)
            .inspect_err(|e| warn!("{} operation failed: {}", action, e))?;
        Ok(response)
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Logs a Reading System on to a Service
    pub fn log_on(&self, username: &str, password: &str) -> Result<bool> {
        let response: LogOnResponse = self.invoke(
            LogOn::ELEMENT,
            LogOn::new(username.to_string(), password.to_string()),
        )?;
        Ok(response.log_on_result)
    }

    /// Logs a Reading System off a Service
    ///
    /// A `false` result or a fault both mean the operation failed. Idle
    /// connections are released once the service has answered.
    pub fn log_off(&mut self) -> Result<bool> {
        let response: LogOffResponse = self.invoke(LogOff::ELEMENT, LogOff::new())?;
        self.release_connections();
        Ok(response.log_off_result)
    }

    /// Retrieves Service properties, including the optional operations it
    /// supports
    ///
    /// Part of the session initialization sequence.
    pub fn get_service_attributes(&self) -> Result<ServiceAttributes> {
        let response: GetServiceAttributesResponse =
            self.invoke(GetServiceAttributes::ELEMENT, GetServiceAttributes::new())?;
        Ok(response.service_attributes)
    }

    /// Sends Reading System properties to a Service
    ///
    /// Part of the session initialization sequence; may be called again to
    /// record changes.
    pub fn set_reading_system_attributes(
        &self,
        attributes: &ReadingSystemAttributes,
    ) -> Result<bool> {
        let response: SetReadingSystemAttributesResponse = self.invoke(
            SetReadingSystemAttributes::ELEMENT,
            SetReadingSystemAttributes::new(attributes.clone()),
        )?;
        Ok(response.set_reading_system_attributes_result)
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Retrieves a list of Content items
    ///
    /// `id` is one of the reserved [`content_list`](crate::models::content_list)
    /// ids or a `contentListRef` returned by [`get_questions`](Self::get_questions).
    /// `first_item` / `last_item` select a page; `0` / `-1` ask for the whole list.
    pub fn get_content_list(&self, id: &str, first_item: i32, last_item: i32) -> Result<ContentList> {
        let response: GetContentListResponse = self.invoke(
            GetContentList::ELEMENT,
            GetContentList::new(id.to_string(), first_item, last_item),
        )?;
        Ok(response.content_list)
    }

    /// Retrieves the metadata of a Content item
    pub fn get_content_metadata(&self, content_id: &str) -> Result<ContentMetadata> {
        let response: GetContentMetadataResponse = self.invoke(
            GetContentMetadata::ELEMENT,
            GetContentMetadata::new(content_id.to_string()),
        )?;
        Ok(response.content_metadata)
    }

    /// Retrieves the resources list of an issued Content item
    pub fn get_content_resources(&self, content_id: &str) -> Result<Resources> {
        let response: GetContentResourcesResponse = self.invoke(
            GetContentResources::ELEMENT,
            GetContentResources::new(content_id.to_string()),
        )?;
        Ok(response.resources)
    }

    /// Requests a Service to issue a Content item
    pub fn issue_content(&self, content_id: &str) -> Result<bool> {
        let response: IssueContentResponse = self.invoke(
            IssueContent::ELEMENT,
            IssueContent::new(content_id.to_string()),
        )?;
        Ok(response.issue_content_result)
    }

    /// Notifies the Service that a Content item has been deleted from the
    /// Reading System
    ///
    /// Only valid for items issued on this Reading System with
    /// `requiresReturn` set.
    pub fn return_content(&self, content_id: &str) -> Result<bool> {
        let response: ReturnContentResponse = self.invoke(
            ReturnContent::ELEMENT,
            ReturnContent::new(content_id.to_string()),
        )?;
        Ok(response.return_content_result)
    }

    // ========================================================================
    // Dynamic menus & announcements
    // ========================================================================

    /// Retrieves the next questions of the dynamic menu
    pub fn get_questions(&self, user_responses: &UserResponses) -> Result<Questions> {
        let response: GetQuestionsResponse = self.invoke(
            GetQuestions::ELEMENT,
            GetQuestions::new(user_responses.clone()),
        )?;
        Ok(response.questions)
    }

    /// Retrieves the announcements the user has not read yet
    pub fn get_service_announcements(&self) -> Result<Announcements> {
        let response: GetServiceAnnouncementsResponse = self.invoke(
            GetServiceAnnouncements::ELEMENT,
            GetServiceAnnouncements::new(),
        )?;
        Ok(response.announcements)
    }

    /// Marks announcements as read
    pub fn mark_announcements_as_read(&self, read: &Read) -> Result<bool> {
        let response: MarkAnnouncementsAsReadResponse = self.invoke(
            MarkAnnouncementsAsRead::ELEMENT,
            MarkAnnouncementsAsRead::new(read.clone()),
        )?;
        Ok(response.mark_announcements_as_read_result)
    }

    // ========================================================================
    // Bookmarks
    // ========================================================================

    /// Stores the bookmarks of one Content item
    pub fn set_bookmarks(&self, content_id: &str, bookmark_set: &BookmarkSet) -> Result<bool> {
        let response: SetBookmarksResponse = self.invoke(
            SetBookmarks::ELEMENT,
            SetBookmarks::new(content_id.to_string(), bookmark_set.clone()),
        )?;
        Ok(response.set_bookmarks_result)
    }

    /// Retrieves the bookmarks of one Content item
    pub fn get_bookmarks(&self, content_id: &str) -> Result<BookmarkSet> {
        let response: GetBookmarksResponse = self.invoke(
            GetBookmarks::ELEMENT,
            GetBookmarks::new(content_id.to_string()),
        )?;
        Ok(response.bookmark_set)
    }
}

//! Tariff chapter and sub-chapter operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::{IdVars, NoVars, PageVars};

/// Tariff chapter (or sub-chapter) record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(rename = "_id")]
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
}

/// Paged chapter listing.
pub struct GetChapters;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaptersData {
    pub get_chapters: Page<Chapter>,
}

impl GraphqlOperation for GetChapters {
    type Variables = PageVars;
    type ResponseData = ChaptersData;

    const QUERY: &'static str = "query GetChapters($page: Int!) { getChapters(pageable: { page: $page }) { totalSize totalPages pageSize pageNumber data { _id nameAr nameEn } } }";
    const OPERATION_NAME: &'static str = "GetChapters";
}

/// Live sub-chapter listing (used to pick parents in forms).
pub struct GetSubChaptersList;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubChaptersData {
    pub get_sub_chapters_list: Page<Chapter>,
}

impl GraphqlOperation for GetSubChaptersList {
    type Variables = NoVars;
    type ResponseData = SubChaptersData;

    const QUERY: &'static str = "query GetSubChaptersList { getSubChaptersList(extraFilter: { deleted: false }) { data { _id nameEn nameAr } } }";
    const OPERATION_NAME: &'static str = "GetSubChaptersList";
}

/// Single-chapter lookup.
pub struct ChapterById;

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterByIdData {
    pub chapter: Chapter,
}

impl GraphqlOperation for ChapterById {
    type Variables = IdVars;
    type ResponseData = ChapterByIdData;

    const QUERY: &'static str =
        "query Chapter($id: ID!) { chapter(id: $id) { _id nameEn nameAr } }";
    const OPERATION_NAME: &'static str = "Chapter";
}

/// New-chapter input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterInput {
    pub name_en: String,
    pub name_ar: String,
}

/// Create a chapter.
pub struct CreateChapter;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChapterData {
    /// Opaque acknowledgement returned by the resolver.
    pub create_chapter: serde_json::Value,
}

impl GraphqlOperation for CreateChapter {
    type Variables = ChapterInput;
    type ResponseData = CreateChapterData;

    const QUERY: &'static str = "mutation CreateChapter($nameEn: String!, $nameAr: String!) { createChapter(createChapterInput: { nameEn: $nameEn, nameAr: $nameAr }) }";
    const OPERATION_NAME: &'static str = "CreateChapter";
}

/// Updated-chapter input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChapterInput {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChapterVars {
    pub chapter_input: UpdateChapterInput,
}

/// Update a chapter.
pub struct UpdateChapter;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChapterData {
    pub update_chapter: Chapter,
}

impl GraphqlOperation for UpdateChapter {
    type Variables = UpdateChapterVars;
    type ResponseData = UpdateChapterData;

    const QUERY: &'static str = "mutation UpdateChapter($chapterInput: UpdateChapterDTO!) { updateChapter(chapterInput: $chapterInput) { _id nameEn nameAr } }";
    const OPERATION_NAME: &'static str = "UpdateChapter";
}

/// Delete a chapter. Chapter ids are numeric on the delete path.
pub struct DeleteChapter;

#[derive(Debug, Clone, Serialize)]
pub struct DeleteChapterVars {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChapterData {
    /// Opaque acknowledgement returned by the resolver.
    pub delete_chapter: serde_json::Value,
}

impl GraphqlOperation for DeleteChapter {
    type Variables = DeleteChapterVars;
    type ResponseData = DeleteChapterData;

    const QUERY: &'static str = "mutation DeleteChapter($id: Int!) { deleteChapter(id: $id) }";
    const OPERATION_NAME: &'static str = "DeleteChapter";
}

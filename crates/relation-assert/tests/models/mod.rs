//! Models shared by the integration tests.
#![allow(dead_code)]

use relation_assert::relation::{BelongsTo, BelongsToMany, HasMany, HasOne, MorphMany, MorphTo};
use relation_assert::{Relation, Relations};

pub struct Author;
pub struct Comment;
pub struct Image;
pub struct Person;
pub struct Post;
pub struct Profile;
pub struct Tag;
pub struct Team;
pub struct Video;

impl Relations for Post {
    fn relation(&self, name: &str) -> Option<Box<dyn Relation>> {
        match name {
            "author" => Some(BelongsTo::<Author>::new().into()),
            "writer" => Some(BelongsTo::<Author>::new().into()),
            "comments" => Some(HasMany::<Comment>::new().into()),
            "tags" => Some(BelongsToMany::<Tag>::new().into()),
            "images" => Some(MorphMany::<Image>::new().into()),
            "profiles" => Some(HasOne::<Profile>::new().into()),
            "profile" => Some(HasOne::<Profile>::new().into()),
            _ => None,
        }
    }
}

impl Relations for Comment {
    fn relation(&self, name: &str) -> Option<Box<dyn Relation>> {
        match name {
            // Declared with the wrong kind on purpose
            "author" => Some(HasMany::<Author>::new().into()),
            "post" => Some(BelongsTo::<Post>::new().into()),
            "commentable" => Some(MorphTo::new("commentable_type").into()),
            "parent" => Some(MorphTo::new("commentable_type").resolved::<Post>().into()),
            "legacy" => Some(MorphTo::new("legacy_kind").into()),
            _ => None,
        }
    }
}

impl Relations for Team {
    fn relation(&self, name: &str) -> Option<Box<dyn Relation>> {
        match name {
            "people" => Some(HasMany::<Person>::new().into()),
            "videos" => Some(MorphMany::<Video>::new().into()),
            _ => None,
        }
    }
}

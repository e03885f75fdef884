//! Course Integration Tests
//!
//! Adding, rearranging and removing modules, and moving lectures between
//! modules of one course.

use coursekit::{CollectionError, Course, Lecture, Module};

fn create_course() -> Course {
    Course::new(
        "azure-devops",
        "Continuous Delivery and DevOps with Azure DevOps: Source Control with Git",
    )
}

fn create_module() -> Module {
    Module::new("Fundamentals")
}

fn create_lecture() -> Lecture {
    Lecture::new("Branching", "https://youtube.com/1234")
}

/// Fundamentals, Course Overview and the git module, one lecture each
fn three_module_course() -> Course {
    let mut course = create_course();

    let mut fundamentals = Module::new("Fundamentals");
    fundamentals
        .add(Lecture::new("Branching", "https://youtube.com/1234"))
        .unwrap();

    let mut overview = Module::new("Course Overview");
    overview
        .add(Lecture::new("Course Overview", "https://youtube.com/1934"))
        .unwrap();

    let mut git = Module::new("Source Control with git on Azure DevOps");
    git.add(Lecture::new("Introduction", "https://youtube.com/1123"))
        .unwrap();

    course.add(fundamentals).unwrap();
    course.add(overview).unwrap();
    course.add(git).unwrap();
    course
}

const GIT: &str = "Source Control with git on Azure DevOps";

#[test]
fn test_add_module_to_course() {
    let mut course = create_course();
    let mut module = create_module();
    module.add(create_lecture()).unwrap();

    course.add(module.clone()).unwrap();

    assert!(course.includes(&module));
}

#[test]
fn test_add_module_with_same_name() {
    let mut course = create_course();
    let mut module1 = create_module();
    module1.add(create_lecture()).unwrap();
    let module2 = create_module();

    let ok = course.add(module1.clone());
    let error = course.add(module2).unwrap_err();

    assert_eq!(ok, Ok(()));
    assert!(course.includes(&module1));
    assert_eq!(course.number_of_modules(), 1);
    assert_eq!(error.to_string(), "Element already exists.");
    assert!(matches!(error, CollectionError::ExistingElement { .. }));

    // The module already in place keeps its lecture
    assert_eq!(course.module("Fundamentals").unwrap().number_of_lectures(), 1);
}

#[test]
fn test_rearrange_modules() {
    let mut course = three_module_course();

    course.move_to("Course Overview", 1).unwrap();

    assert_eq!(course.position("Course Overview").unwrap(), 1);
    assert_eq!(course.position("Fundamentals").unwrap(), 2);
    assert_eq!(course.position(GIT).unwrap(), 3);
}

#[test]
fn test_rearrange_exceeding_position_clamps_to_last() {
    let mut course = three_module_course();

    course.move_to("Fundamentals", 10).unwrap();

    assert_eq!(course.position("Course Overview").unwrap(), 1);
    assert_eq!(course.position(GIT).unwrap(), 2);
    assert_eq!(course.position("Fundamentals").unwrap(), 3);
}

#[test]
fn test_rearrange_negative_position_clamps_to_first() {
    let mut course = three_module_course();

    course.move_to("Fundamentals", -1).unwrap();

    assert_eq!(course.position("Fundamentals").unwrap(), 1);
    assert_eq!(course.position("Course Overview").unwrap(), 2);
    assert_eq!(course.position(GIT).unwrap(), 3);
}

#[test]
fn test_move_unknown_module() {
    let mut course = three_module_course();

    let err = course.move_to("Advanced", 1).unwrap_err();

    assert!(err.is_unexisting());
    assert_eq!(
        course.modules().names(),
        vec!["Fundamentals", "Course Overview", GIT]
    );
}

#[test]
fn test_move_lecture_to_different_module() {
    let mut course = create_course();
    course
        .add(
            Module::new("Fundamentals")
                .with_lecture(Lecture::new("Branching", "https://youtube.com/1234"))
                .unwrap(),
        )
        .unwrap();
    course
        .add(
            Module::new(GIT)
                .with_lecture(Lecture::new("Introduction", "https://youtube.com/1123"))
                .unwrap(),
        )
        .unwrap();

    course
        .move_lecture("Branching", "Fundamentals", GIT, 1)
        .unwrap();

    let fundamentals = course.module("Fundamentals").unwrap();
    let git = course.module(GIT).unwrap();
    assert_eq!(fundamentals.number_of_lectures(), 0);
    assert_eq!(git.number_of_lectures(), 2);
    assert_eq!(git.position("Branching").unwrap(), 1);
    assert_eq!(git.position("Introduction").unwrap(), 2);
}

#[test]
fn test_move_lecture_name_taken_in_destination() {
    let mut course = create_course();
    course
        .add(Module::new("Fundamentals").with_lecture(create_lecture()).unwrap())
        .unwrap();
    course
        .add(Module::new(GIT).with_lecture(create_lecture()).unwrap())
        .unwrap();

    let err = course
        .move_lecture("Branching", "Fundamentals", GIT, 1)
        .unwrap_err();

    assert_eq!(err.to_string(), "Element already exists.");
    assert!(course.module("Fundamentals").unwrap().includes("Branching"));
    assert_eq!(course.module(GIT).unwrap().number_of_lectures(), 1);
}

#[test]
fn test_move_lecture_not_in_source_module() {
    let mut course = three_module_course();

    let err = course
        .move_lecture("Introduction", "Fundamentals", "Course Overview", 1)
        .unwrap_err();

    assert!(err.is_unexisting());
    assert_eq!(err.name(), "Introduction");
    assert_eq!(course.module(GIT).unwrap().number_of_lectures(), 1);
}

#[test]
fn test_remove_module() {
    let mut course = create_course();
    let mut module = create_module();
    module.add(create_lecture()).unwrap();
    course.add(module.clone()).unwrap();

    let ok = course.remove(&module);

    assert_eq!(ok, Ok(()));
    assert_eq!(course.number_of_modules(), 0);
    assert!(!course.includes(&module));
}

#[test]
fn test_remove_unexisting_module() {
    let mut course = create_course();
    let module = create_module();
    course.add(module.clone()).unwrap();

    course.remove(&module).unwrap();
    let first = course.remove(&module).unwrap_err();
    let second = course.remove(&module).unwrap_err();

    assert!(matches!(first, CollectionError::UnexistingElement { .. }));
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "Element does not exist.");
}

#[test]
fn test_remove_renumbers_following_modules() {
    let mut course = three_module_course();

    course.remove("Fundamentals").unwrap();

    assert_eq!(course.position("Course Overview").unwrap(), 1);
    assert_eq!(course.position(GIT).unwrap(), 2);
    assert!(course.position("Fundamentals").unwrap_err().is_unexisting());
}

use glam::Vec3;

/// Distance along a ray to its first hit with a sphere in front of the origin.
///
/// `direction` must be normalized. Returns `None` when the ray misses or the
/// sphere is entirely behind the origin.
pub fn ray_sphere_hit(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_origin = origin - center;
    let b = to_origin.dot(direction);
    let c = to_origin.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    let far = -b + sqrt_d;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Pick the candidate closest to the ray origin whose center passes within
/// `hit_radius` of the ray. Candidates farther along the ray than the
/// occluding sphere's surface, and non-finite positions, are skipped.
pub fn pick_nearest<T, I>(
    origin: Vec3,
    direction: Vec3,
    candidates: I,
    hit_radius: f32,
    occluder: Option<(Vec3, f32)>,
) -> Option<T>
where
    I: IntoIterator<Item = (T, Vec3)>,
{
    let occluded_beyond = occluder
        .and_then(|(center, radius)| ray_sphere_hit(origin, direction, center, radius))
        .unwrap_or(f32::INFINITY);

    let mut best: Option<(f32, T)> = None;
    for (id, position) in candidates {
        if !position.is_finite() {
            continue;
        }
        let t = (position - origin).dot(direction);
        if t < 0.0 || t > occluded_beyond {
            continue;
        }

        let closest = origin + direction * t;
        if closest.distance_squared(position) > hit_radius * hit_radius {
            continue;
        }

        if best.as_ref().is_none_or(|(best_t, _)| t < *best_t) {
            best = Some((t, id));
        }
    }

    best.map(|(_, id)| id)
}

/// Screen scale of a label anchored `distance` away from a perspective camera
pub fn label_scale(distance_factor: f32, fov_radians: f32, distance: f32) -> f32 {
    let visible_height = 2.0 * (fov_radians / 2.0).tan() * distance;
    if visible_height <= f32::EPSILON {
        return distance_factor;
    }
    distance_factor / visible_height
}
